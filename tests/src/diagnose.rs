mod integration;
mod server;
