fn main() -> Result<(), Box<dyn std::error::Error>> {
    // One package per catalog service
    tonic_build::configure()
        .build_server(true)
        .build_client(true)
        .compile_protos(&["proto/racing.proto", "proto/sports.proto"], &["proto"])?;
    Ok(())
}
