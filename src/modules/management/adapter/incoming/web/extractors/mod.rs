mod management_auth;

pub use management_auth::ManagementUser;
