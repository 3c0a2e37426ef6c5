pub mod controller;
pub mod dto;
pub mod request_context;
pub mod responder;
pub mod routes;
pub mod util;
