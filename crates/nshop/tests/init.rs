#[cfg(feature = "server")]
#[test]
fn init_registers_proxy_and_flags() {
    use nshop::domain::config::GatewayConfig;
    use nshop::kernel::server::ApiState;

    let slices = nshop::init(&GatewayConfig::default()).expect("slices");
    assert_eq!(slices.len(), 2);

    let state = ApiState::builder()
        .config(GatewayConfig::default())
        .register_slices(slices)
        .build()
        .expect("state");

    assert!(state.get_slice::<nshop::features::proxy::Proxy>().is_some());
    let flags = state.try_get_slice::<nshop::features::flags::Flags>().expect("flags slice");
    assert!(!flags.registry.is_enabled(None, "pcBuilder"));
}

#[test]
fn flags_are_always_compiled_in() {
    assert!(nshop::features::is_enabled("flags"));
    assert!(!nshop::features::is_enabled("licensing"));
}
