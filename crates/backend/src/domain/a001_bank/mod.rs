pub mod directory;
pub mod mock_data;
