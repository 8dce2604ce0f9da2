use ethers_contract_abigen::MultiAbigen;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=abi");

    MultiAbigen::from_json_files("./abi")?
        .build()?
        .write_to_module("./src/contract_stub", false)?;

    Ok(())
}
