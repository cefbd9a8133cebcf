//! Fake SDK bundle builder shared by the collection tests

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use errcat_core::SdkConfig;
use tempfile::TempDir;

pub const VERSION_PLIST: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
	<key>CFBundleShortVersionString</key>
	<string>15.4</string>
	<key>ProductBuildVersion</key>
	<string>16E140</string>
</dict>
</plist>
"#;

#[derive(Debug, Clone, Copy)]
pub enum Platform {
  Mac,
  Phone,
}

/// An SDK bundle on disk with both default platform directories
pub struct FakeSdk {
  dir: TempDir,
  config: SdkConfig,
}

impl FakeSdk {
  pub fn new() -> Self {
    let sdk = Self::without_version();
    std::fs::write(sdk.root().join(&sdk.config.version_file), VERSION_PLIST).unwrap();
    sdk
  }

  pub fn without_version() -> Self {
    let dir = TempDir::new().unwrap();
    let config = SdkConfig::default();
    for platform in &config.platforms {
      std::fs::create_dir_all(dir.path().join(platform)).unwrap();
    }
    std::fs::create_dir_all(dir.path().join("Contents")).unwrap();
    Self { dir, config }
  }

  pub fn root(&self) -> &Path {
    self.dir.path()
  }

  pub fn frameworks_dir(&self, platform: Platform) -> PathBuf {
    let index = match platform {
      Platform::Mac => 0,
      Platform::Phone => 1,
    };
    self.root().join(&self.config.platforms[index])
  }

  pub fn headers_dir(&self, platform: Platform, module: &str) -> PathBuf {
    self
      .frameworks_dir(platform)
      .join(format!("{}.framework", module))
      .join("Headers")
  }

  /// Write a header into `<module>.framework/Headers`
  pub fn header(&self, platform: Platform, module: &str, file: &str, contents: impl AsRef<[u8]>) -> PathBuf {
    let headers = self.headers_dir(platform, module);
    std::fs::create_dir_all(&headers).unwrap();
    let path = headers.join(file);
    std::fs::write(&path, contents).unwrap();
    path
  }

  /// Write `<module>.apinotes` next to the module's headers
  pub fn notes(&self, platform: Platform, module: &str, contents: &str) {
    let headers = self.headers_dir(platform, module);
    std::fs::create_dir_all(&headers).unwrap();
    std::fs::write(headers.join(format!("{}.apinotes", module)), contents).unwrap();
  }
}

/// An `NS_ERROR_ENUM` declaration with explicit sequential values starting at 1
pub fn error_enum(domain: &str, names: &[&str]) -> String {
  let mut out = format!("typedef NS_ERROR_ENUM({}, AcmeError) {{\n", domain);
  for (i, name) in names.iter().enumerate() {
    out.push_str(&format!("    {} = {},\n", name, i + 1));
  }
  out.push_str("};\n");
  out
}
