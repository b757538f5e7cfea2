/*!
Names of the things a scenario is about --- [fluents](Fluent), [agents](Agent), and [actions](Action).

Each is an immutable wrapper around a shared string, and two instances are equal *if and only if* their names are equal.

```rust
# use otter_acts::structures::names::{Action, Fluent};
let p = Fluent::new("letter sent");
let q = Fluent::from("letter sent");
assert_eq!(p, q);
assert_eq!(p.name(), "letter sent");

let write = Action::from("write letter");
assert_eq!(format!("{write}"), "write letter");
```

Clones share the underlying string, and as observations are cloned at every branch of a search this keeps clones cheap.

Each type is [Borrow]\<str\>, and so maps keyed by a name may be read with a plain `&str`.
*/

use std::{borrow::Borrow, rc::Rc};

macro_rules! name_type {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(Rc<str>);

        impl $name {
            /// An instance with the given name.
            pub fn new(name: impl AsRef<str>) -> Self {
                Self(Rc::from(name.as_ref()))
            }

            /// The name.
            pub fn name(&self) -> &str {
                &self.0
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(name: &str) -> Self {
                Self::new(name)
            }
        }

        impl From<String> for $name {
            fn from(name: String) -> Self {
                Self(Rc::from(name))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::fmt::Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}({:?})", stringify!($name), &*self.0)
            }
        }
    };
}

name_type!(
    /// A named boolean condition about the world.
    Fluent
);

name_type!(
    /// Something which performs actions.
    Agent
);

name_type!(
    /// Something which may be performed, with effects given by [statements](crate::structures::statement).
    Action
);
