#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn install_is_noop_without_a_browser() {
    let _manager = CardInteractionManager::install();
}
