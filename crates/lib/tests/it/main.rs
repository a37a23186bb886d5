/*! Integration tests for Dotted.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the main library structure:
 * - tree: Tests for the Value, Map and Object types and their JSON form
 * - path: Tests for path splitting and the PathConfig syntax
 * - access: Tests for the access operations (get/set/has/forget, dot/undot, data_get/data_set, selection)
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("dotted=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod helpers;
mod path;
