#![cfg(feature = "proptest")]

use proptest::prelude::*;

use crate::Alphabet;

#[cfg_attr(docsrs, doc(cfg(feature = "proptest")))]
impl Arbitrary for Alphabet {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with((): Self::Parameters) -> Self::Strategy {
        prop_oneof![Just(Alphabet::Bitcoin), Just(Alphabet::Ripple)].boxed()
    }
}
