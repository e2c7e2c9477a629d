use render::gpu_types::FrameUniform;
use render::pipeline::SHIP_SHADER;

fn parse() -> naga::Module {
    naga::front::wgsl::parse_str(SHIP_SHADER).expect("wgsl parse")
}

#[test]
fn compile_ship_shader() {
    let module = parse();
    let mut validator = naga::valid::Validator::new(
        naga::valid::ValidationFlags::all(),
        naga::valid::Capabilities::all(),
    );
    validator.validate(&module).expect("wgsl validate");

    let names: Vec<_> = module.entry_points.iter().map(|ep| ep.name.as_str()).collect();
    assert!(names.contains(&"vs_main"));
    assert!(names.contains(&"fs_main"));
}

#[test]
fn uniform_layout_matches_rust() {
    let module = parse();
    let span = module
        .types
        .iter()
        .find_map(|(_, ty)| match (&ty.name, &ty.inner) {
            (Some(name), naga::TypeInner::Struct { span, .. }) if name == "FrameUniform" => Some(*span),
            _ => None,
        })
        .expect("FrameUniform struct");
    assert_eq!(span as usize, std::mem::size_of::<FrameUniform>());
    assert_eq!(span, 224);
}
