use std::env;

fn main() {
    // version resource only makes sense for Windows executables
    if env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("windows") {
        compile_resources();
    }
}

fn compile_resources() {
    let name = env::var("CARGO_PKG_NAME").unwrap();
    let version = env::var("CARGO_PKG_VERSION").unwrap();
    let now = chrono::Local::now();
    let mut res = winres::WindowsResource::new();
    res.set("ProductName", "File Drop")
        .set("FileDescription", &env::var("CARGO_PKG_DESCRIPTION").unwrap())
        .set("FileVersion", &version)
        .set("ProductVersion", &version)
        .set("InternalName", &format!("{}.exe", name))
        .set(
            "LegalCopyright",
            &format!("filedrop contributors © {}", now.format("%Y")),
        );
    res.compile().unwrap();
}
