//! Named element access (`v.x`, `c.r`) through `Deref` to `#[repr(C)]` field structs.
//!
//! `Vector<T, N>` derefs to the positional view (`XY`, `XYZ`, `XYZW`), which in turn derefs to
//! the color view (`RG`, `RGB`, `RGBA`). All views have the same layout as `[T; N]`.

use std::{
    mem,
    ops::{Deref, DerefMut},
};

use crate::Vector;

macro_rules! field_view {
    ($name:ident { $($field:ident),+ }) => {
        #[repr(C)]
        pub struct $name<T> {
            $( pub $field: T, )+
            _priv: (), // prevent external construction
        }
    };
}

field_view!(XY { x, y });
field_view!(XYZ { x, y, z });
field_view!(XYZW { x, y, z, w });
field_view!(RG { r, g });
field_view!(RGB { r, g, b });
field_view!(RGBA { r, g, b, a });

macro_rules! deref_view {
    ($from:ty => $to:ident) => {
        impl<T> Deref for $from {
            type Target = $to<T>;

            #[inline]
            fn deref(&self) -> &Self::Target {
                unsafe { mem::transmute(self) }
            }
        }

        impl<T> DerefMut for $from {
            #[inline]
            fn deref_mut(&mut self) -> &mut Self::Target {
                unsafe { mem::transmute(self) }
            }
        }
    };
}

deref_view!(Vector<T, 2> => XY);
deref_view!(Vector<T, 3> => XYZ);
deref_view!(Vector<T, 4> => XYZW);
deref_view!(XY<T> => RG);
deref_view!(XYZ<T> => RGB);
deref_view!(XYZW<T> => RGBA);
