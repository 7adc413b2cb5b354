//! md5-engine Basic Example
//!
//! Minimal usage: `let d = md5_engine::digest(&data);`

#![allow(clippy::pedantic, clippy::nursery)]

fn main() {
    // Zero boilerplate:
    let data = b"Hello, World!";
    let d = md5_engine::digest(data);

    println!("Data: {:?}", String::from_utf8_lossy(data));
    println!("MD5:  {}", hex::encode(d));
}
