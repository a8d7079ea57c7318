#![allow(dead_code)]
#![allow(unused_imports)]

mod builders;
mod mock_forwarder;

pub use builders::*;
pub use mock_forwarder::MockForwarder;
