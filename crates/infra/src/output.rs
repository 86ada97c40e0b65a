mod json;

pub use json::{Charset, JsonFileSink, StreamingJsonSink, encode_pretty, save};
