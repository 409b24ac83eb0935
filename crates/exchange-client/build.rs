use protoc_bin_vendored::protoc_bin_path;
use std::{env, error::Error};

fn main() -> Result<(), Box<dyn Error>> {
    println!("cargo:rerun-if-changed=proto/exchange/results/v1/results.proto");

    let protoc_path = protoc_bin_path()?;
    unsafe {
        env::set_var("PROTOC", &protoc_path);
    }

    tonic_build::configure()
        .build_server(true)
        .build_client(true)
        .compile_protos(&["proto/exchange/results/v1/results.proto"], &["proto"])?;
    Ok(())
}
