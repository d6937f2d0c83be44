use quickcheck::{Arbitrary, Gen};

mod counting;
mod filters;
mod set;

/// A random input sequence drawn from a narrow range so that values repeat often.
#[derive(Clone, Debug)]
pub(crate) struct Crowded(pub(crate) Vec<i32>);

impl Arbitrary for Crowded {
    fn arbitrary(g: &mut Gen) -> Self {
        let xs = Vec::<i8>::arbitrary(g);
        Self(xs.into_iter().map(|x| i32::from(x % 16)).collect())
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.0.shrink().map(Self))
    }
}
