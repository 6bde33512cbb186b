/// Request payloads, in wire field order
use serde::Serialize;

pub const LOGIN_ENDPOINT: &str = "/login";
pub const CHECK_ENDPOINT: &str = "/check";
pub const REGISTER_ENDPOINT: &str = "/register";

#[derive(Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub secret: &'a str,
    pub username: &'a str,
    pub password: &'a str,
    pub hwid: &'a str,
}

#[derive(Serialize)]
pub(crate) struct CheckRequest<'a> {
    pub secret: &'a str,
    pub license: &'a str,
}

#[derive(Serialize)]
pub(crate) struct RegisterRequest<'a> {
    pub secret: &'a str,
    pub username: &'a str,
    pub password: &'a str,
    pub license: &'a str,
    pub hwid: &'a str,
}
