fn main() {
    // JSON config override baked into the firmware image (see `config::SystemConfig::load`).
    println!("cargo:rerun-if-env-changed=AQUACTL_CONFIG");

    #[cfg(feature = "espidf")]
    embuild::espidf::sysenv::output();
}
