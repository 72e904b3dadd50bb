use std::error::Error;
use std::path::Path;

fn main() -> Result<(), Box<dyn Error>> {
    println!("cargo:rerun-if-changed=proto/api.proto");

    // Builds without a system protoc fall back to the bundled binary.
    if std::env::var_os("PROTOC").is_none() {
        std::env::set_var("PROTOC", protoc_bin_vendored::protoc_bin_path()?);
    }

    let out_dir = Path::new("src/proto");
    std::fs::create_dir_all(out_dir)?;

    tonic_build::configure()
        .build_server(false)
        .out_dir(out_dir)
        .compile_protos(&["proto/api.proto"], &["proto"])?;

    Ok(())
}
