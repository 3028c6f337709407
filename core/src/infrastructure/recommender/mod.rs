pub mod http_suggester;
