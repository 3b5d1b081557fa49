//! Version control: local repository setup and remote repository creation

pub mod local;
pub mod remote;

pub use local::{add_remote, init_local};
pub use remote::{remote_url, CreateRepoRequest, RepoHost};
