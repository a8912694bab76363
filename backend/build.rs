use std::fs;
use std::path::Path;

fn main() {
    let static_dir = Path::new("static");
    let out_dir = static_dir.join("dist");
    let dist_dir = Path::new("../frontend/dist");

    if dist_dir.exists() {
        let _ = fs::remove_dir_all(&out_dir);
        fs::create_dir_all(static_dir).expect("create static dir");
        fs_extra::dir::copy(
            dist_dir,
            static_dir,
            &fs_extra::dir::CopyOptions::new().overwrite(true),
        )
            .expect("copy frontend bundle");
    }
    println!("cargo:rerun-if-changed=../frontend/dist");
}
