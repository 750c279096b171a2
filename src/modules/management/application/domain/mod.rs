pub mod management_token;
