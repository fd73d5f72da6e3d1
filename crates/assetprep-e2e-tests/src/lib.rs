mod test_utils;

pub use test_utils::{TestServer, init_tracing, model_bytes, write_assets_config};
