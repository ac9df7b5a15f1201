/// Forwards every owned/borrowed combination of a binary operator to a
/// `fn $core(&self, &$t) -> $t` method.
macro_rules! forward_binop {
    (impl $imp:ident, $method:ident for $t:ty => $core:ident) => {
        impl $imp<&$t> for &$t {
            type Output = $t;

            #[inline]
            fn $method(self, rhs: &$t) -> $t {
                self.$core(rhs)
            }
        }

        impl $imp<$t> for $t {
            type Output = $t;

            #[inline]
            fn $method(self, rhs: $t) -> $t {
                (&self).$core(&rhs)
            }
        }

        impl $imp<&$t> for $t {
            type Output = $t;

            #[inline]
            fn $method(self, rhs: &$t) -> $t {
                (&self).$core(rhs)
            }
        }

        impl $imp<$t> for &$t {
            type Output = $t;

            #[inline]
            fn $method(self, rhs: $t) -> $t {
                self.$core(&rhs)
            }
        }
    };
}

/// `x op= y` as `x = &x op &y`, for operators without an in-place kernel.
macro_rules! forward_assign_op {
    (impl $imp:ident, $method:ident for $t:ty => $core:ident) => {
        impl $imp<&$t> for $t {
            #[inline]
            fn $method(&mut self, rhs: &$t) {
                *self = (&*self).$core(rhs);
            }
        }

        impl $imp<$t> for $t {
            #[inline]
            fn $method(&mut self, rhs: $t) {
                *self = (&*self).$core(&rhs);
            }
        }
    };
}
