pub mod clock;
pub mod notion;
pub mod remote;
pub mod storage;
