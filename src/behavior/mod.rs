//! Behavior Triad
//!
//! Animate objects (vehicles, characters, insects) are driven by three
//! cooperating controllers owned by the entity:
//! - `Brain`: decides what to do, one motor command per frame
//! - `Physics`: turns motor commands into speed and displacement
//! - `Motion`: builds the body and animates its joints
//!
//! The three refer to each other through `Link`s, which name the owning
//! object and the role but never own or borrow anything. A link is resolved
//! through the entity (`Entity::physics_of`) or the world.

pub mod brain;
pub mod motion;
pub mod physics;

pub use brain::{Brain, MotorCommand, Order};
pub use motion::{BodyBuilder, Motion, MotionKind};
pub use physics::Physics;

use std::fmt;
use std::marker::PhantomData;

use crate::object::ObjectId;

/// Non-owning reference to the `T` controller of an object.
pub struct Link<T> {
    owner: ObjectId,
    _role: PhantomData<fn() -> T>,
}

impl<T> Link<T> {
    pub fn new(owner: ObjectId) -> Self {
        Self {
            owner,
            _role: PhantomData,
        }
    }

    /// Object whose controller this link points to.
    pub fn owner(&self) -> ObjectId {
        self.owner
    }
}

// `T` is a role marker and carries no bounds
impl<T> Clone for Link<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Link<T> {}

impl<T> PartialEq for Link<T> {
    fn eq(&self, other: &Self) -> bool {
        self.owner == other.owner
    }
}

impl<T> Eq for Link<T> {}

impl<T> fmt::Debug for Link<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let role = std::any::type_name::<T>().rsplit("::").next().unwrap_or("?");
        write!(f, "Link<{}>({})", role, self.owner.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_is_plain_data() {
        let a: Link<Physics> = Link::new(ObjectId(7));
        let b = a;
        assert_eq!(a, b);
        assert_eq!(b.owner(), ObjectId(7));
        assert_eq!(format!("{:?}", a), "Link<Physics>(7)");
    }
}
