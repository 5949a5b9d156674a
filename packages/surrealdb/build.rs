use std::env;
use std::fs;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=migrations/tables");

    let out_dir = match env::var("OUT_DIR") {
        Ok(dir) => dir,
        Err(e) => panic!("BUILD FAILED: Cannot read OUT_DIR environment variable: {}", e),
    };
    let dest_path = Path::new(&out_dir).join("migrations.surql");

    let mut entries: Vec<_> = match fs::read_dir("migrations/tables") {
        Ok(dir) => dir.filter_map(|e| e.ok()).map(|e| e.path()).collect(),
        Err(e) => panic!("BUILD FAILED: Cannot read migrations directory 'migrations/tables': {}", e),
    };

    entries.retain(|path| path.extension().and_then(|s| s.to_str()) == Some("surql"));

    // Table files are applied in filename order
    entries.sort();

    let mut combined = String::new();
    for path in entries {
        match fs::read_to_string(&path) {
            Ok(content) => combined.push_str(&content),
            Err(e) => panic!("BUILD FAILED: Cannot read migration file {:?}: {}", path, e),
        }
        combined.push_str("\n\n");
    }

    if let Err(e) = fs::write(&dest_path, combined) {
        panic!("BUILD FAILED: Cannot write combined migrations file to {:?}: {}", dest_path, e);
    }
}
