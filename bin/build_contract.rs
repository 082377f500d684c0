//! Binary for building WASM contracts from odra modules.
#![doc = "Binary for building WASM contracts from odra modules."]

#[allow(unused_imports)]
use advanced_token_contracts;

fn main() {
    // The actual compilation is handled by the odra-build crate
}
