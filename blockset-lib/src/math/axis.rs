use std::ops::{Index, IndexMut};

use enum_map::Enum;
use enumset::{EnumSet, EnumSetType};
use glam::{IVec3, UVec3};

macro_rules! impl_from_for_vec {
    { $enum_type:ident for $value_type:ident {
        $( $variant:ident => ( $( $value:expr ),* ), )*
    } } => {
        impl From<$enum_type> for $value_type {
            fn from(value: $enum_type) -> Self {
                match value {
                    $( <$enum_type>::$variant => Self::new( $( $value as _ ),* ), )*
                }
            }
        }
    };
}

macro_rules! impl_index_for_vec {
    { $axis_type:ident for $base_type:ident: $vector_type:ident {
        $( $axis_name:ident => $axis_field:ident, )*
    } } => {
        impl Index<$axis_type> for $vector_type {
            type Output = $base_type;

            fn index(&self, index: $axis_type) -> &Self::Output {
                match index {
                    $( $axis_type::$axis_name => &self.$axis_field, )*
                }
            }
        }

        impl IndexMut<$axis_type> for $vector_type {
            fn index_mut(&mut self, index: $axis_type) -> &mut Self::Output {
                match index {
                    $( $axis_type::$axis_name => &mut self.$axis_field, )*
                }
            }
        }
    };
    { $axis_type:ident for [
        $( $base_type:ident: $vector_type:ident; )*
    ] $axes:tt } => { $(
        impl_index_for_vec! {
            $axis_type for $base_type: $vector_type
            $axes
        }
    )* };
}

/// A three-dimensional axis; `X`, `Y`, or `Z`.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Enum, EnumSetType)]
#[enumset(no_super_impls)]
pub enum Axis3 {
    X,
    Y,
    Z,
}

impl Axis3 {
    /// All three axes in order.
    pub const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];
}

impl_index_for_vec! {
    Axis3 for [
        i32: IVec3;
        u32: UVec3;
    ] {
        X => x,
        Y => y,
        Z => z,
    }
}

/// A one-dimensional facing direction; towards the lower (`X0`) or upper (`X1`) end of an axis.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Enum, EnumSetType)]
#[enumset(no_super_impls)]
pub enum Facing1 {
    X0,
    X1,
}

impl Facing1 {
    /// Returns the opposite facing direction.
    pub fn flipped(self) -> Self {
        match self {
            Self::X0 => Self::X1,
            Self::X1 => Self::X0,
        }
    }
}

/// A set of one-dimensional facing directions.
pub type Facings1 = EnumSet<Facing1>;

/// A three-dimensional facing direction; left, right, down, up, back or front.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Enum, EnumSetType)]
#[enumset(no_super_impls)]
pub enum Facing3 {
    X0,
    X1,
    Y0,
    Y1,
    Z0,
    Z1,
}

impl Facing3 {
    /// Combines an `axis` with the direction along it.
    pub fn along(axis: Axis3, facing: Facing1) -> Self {
        match (axis, facing) {
            (Axis3::X, Facing1::X0) => Self::X0,
            (Axis3::X, Facing1::X1) => Self::X1,
            (Axis3::Y, Facing1::X0) => Self::Y0,
            (Axis3::Y, Facing1::X1) => Self::Y1,
            (Axis3::Z, Facing1::X0) => Self::Z0,
            (Axis3::Z, Facing1::X1) => Self::Z1,
        }
    }

    /// Returns the opposite facing direction.
    pub fn flipped(self) -> Self {
        match self {
            Self::X0 => Self::X1,
            Self::X1 => Self::X0,
            Self::Y0 => Self::Y1,
            Self::Y1 => Self::Y0,
            Self::Z0 => Self::Z1,
            Self::Z1 => Self::Z0,
        }
    }

    /// Whether the facing direction points in the positive direction.
    pub fn is_positive(self) -> bool {
        matches!(self, Self::X1 | Self::Y1 | Self::Z1)
    }

    /// Whether the facing direction points in the negative direction.
    pub fn is_negative(self) -> bool {
        !self.is_positive()
    }

    /// Returns the axis which the facing direction is along.
    pub fn axis(self) -> Axis3 {
        match self {
            Facing3::X0 | Facing3::X1 => Axis3::X,
            Facing3::Y0 | Facing3::Y1 => Axis3::Y,
            Facing3::Z0 | Facing3::Z1 => Axis3::Z,
        }
    }
}

impl_from_for_vec! {
    Facing3 for IVec3 {
        X0 => (-1,  0,  0),
        X1 => ( 1,  0,  0),
        Y0 => ( 0, -1,  0),
        Y1 => ( 0,  1,  0),
        Z0 => ( 0,  0, -1),
        Z1 => ( 0,  0,  1),
    }
}

/// A set of three-dimensional facing directions.
pub type Facings3 = EnumSet<Facing3>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_vec_by_axis() {
        let mut point = IVec3::new(1, -2, 3);
        assert_eq!(point[Axis3::X], 1);
        assert_eq!(point[Axis3::Y], -2);
        assert_eq!(point[Axis3::Z], 3);

        point[Axis3::Y] = 7;
        assert_eq!(point, IVec3::new(1, 7, 3));
    }

    #[test]
    fn facing_along_axis() {
        for axis in Axis3::ALL {
            for facing in [Facing1::X0, Facing1::X1] {
                let facing3 = Facing3::along(axis, facing);
                assert_eq!(facing3.axis(), axis);
                assert_eq!(facing3.is_positive(), facing == Facing1::X1);
                assert_eq!(facing3.flipped(), Facing3::along(axis, facing.flipped()));
            }
        }
    }

    #[test]
    fn facing_to_vec() {
        for facing in EnumSet::<Facing3>::all() {
            let offset = IVec3::from(facing);
            assert_eq!(offset[facing.axis()], if facing.is_positive() { 1 } else { -1 });
            let length = offset.abs();
            assert_eq!(length.x + length.y + length.z, 1);
        }
    }
}
