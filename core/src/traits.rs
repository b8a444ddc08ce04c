use num_bigint::BigInt;

/// Abstract source of interpolation points used during reconstruction.
pub trait PointSource {
    /// The x-coordinate (share index).
    fn x(&self) -> &BigInt;

    /// The y-coordinate (share value).
    fn y(&self) -> &BigInt;
}

impl PointSource for (BigInt, BigInt) {
    fn x(&self) -> &BigInt {
        &self.0
    }

    fn y(&self) -> &BigInt {
        &self.1
    }
}

impl<T: PointSource + ?Sized> PointSource for &T {
    fn x(&self) -> &BigInt {
        (**self).x()
    }

    fn y(&self) -> &BigInt {
        (**self).y()
    }
}
