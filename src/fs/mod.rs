pub mod dir_entry;
pub mod filesystem_front;
pub mod fsf_ref;
pub mod mock_fs;
pub mod path;
pub mod real_fs;
