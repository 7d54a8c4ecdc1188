//! Code for handling IDs
macro_rules! define_id_type {
    ($name:ident) => {
        #[derive(Clone, std::hash::Hash, PartialEq, Eq, serde::Deserialize, Debug)]
        /// An ID type (e.g. `ProvinceID`, `ProducerID`)
        pub struct $name(pub std::rc::Rc<str>);

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                $name(std::rc::Rc::from(s))
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                $name(std::rc::Rc::from(s))
            }
        }

        impl $name {
            /// Create a new ID from a string slice
            pub fn new(id: &str) -> Self {
                $name(std::rc::Rc::from(id))
            }
        }
    };
}
pub(crate) use define_id_type;
