mod support;
mod pipeline;
mod http_api;
