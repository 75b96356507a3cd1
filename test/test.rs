use std::collections::BTreeSet;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::process::ExitStatus;

use clap::Parser;
use color_eyre::Result;
use flate2::read::GzDecoder;
use qix_build::cli::input::CliArgs;
use qix_build::cli::output::executors::Invoker;
use qix_build::config_file::{qix_cfg_from_file, QixConfigFile};
use qix_build::domain::commands::command_lines::CompilerCommand;
use qix_build::domain::flags::FlagSet;
use qix_build::domain::platform::PlatformEntry;
use qix_build::error::BuildError;
use qix_build::packaging::{self, PackContext};
use qix_build::utils::reader::build_model;
use qix_build::worker::perform_main_work;
use tempfile::tempdir;

const ASSETS: [&str; 3] = ["README.md", "CHANGELOG.md", "LICENSE"];

fn exit_status(code: i32) -> ExitStatus {
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        ExitStatus::from_raw(code << 8)
    }
    #[cfg(windows)]
    {
        use std::os::windows::process::ExitStatusExt;
        ExitStatus::from_raw(code as u32)
    }
}

/// Stands in for the Odin compiler, writing a binary whose contents are its own path
#[derive(Default)]
struct FakeOdin {
    outputs: Vec<PathBuf>,
}

impl Invoker for FakeOdin {
    fn invoke(&mut self, command: &CompilerCommand) -> Result<ExitStatus> {
        fs::write(&command.output, command.output.display().to_string())?;
        self.outputs.push(command.output.clone());
        Ok(exit_status(0))
    }
}

fn project_with_assets(assets: &[&str]) -> Result<tempfile::TempDir> {
    let temp = tempdir()?;
    for asset in assets {
        fs::write(temp.path().join(asset), format!("# {asset}"))?;
    }
    Ok(temp)
}

fn files_in(dir: &Path) -> Result<BTreeSet<String>> {
    fs::read_dir(dir)?
        .map(|entry| -> Result<String> { Ok(entry?.file_name().to_string_lossy().to_string()) })
        .collect()
}

fn tar_gz_entries(archive: &Path) -> Result<BTreeSet<String>> {
    let mut tar = tar::Archive::new(GzDecoder::new(File::open(archive)?));
    let mut entries = BTreeSet::new();
    for entry in tar.entries()? {
        let path = entry?.path()?.to_string_lossy().to_string();
        entries.insert(path.trim_end_matches('/').to_string());
    }
    Ok(entries)
}

#[test]
fn test_two_platform_matrix_scenario() -> Result<()> {
    let temp = project_with_assets(&ASSETS)?;
    let root = temp.path();
    let pack = root.join("pack");

    let flags = FlagSet::compose(["-o:speed"], Vec::<Vec<&str>>::new());
    let assets: Vec<String> = ASSETS.iter().map(|a| a.to_string()).collect();
    let platforms = [PlatformEntry::new("x-a", false), PlatformEntry::new("x-b", true)];
    let ctx = PackContext {
        driver: Path::new("odin"),
        source_root: Path::new("src"),
        project_root: root,
        output_dir: &pack,
        program: "x",
        version: "1.0.0",
        flags: &flags,
        assets: &assets,
        platforms: &platforms,
    };

    let packed = packaging::package(&ctx, &mut FakeOdin::default())?;
    assert_eq!(packed.len(), 2);

    let expected: BTreeSet<String> = ["x-a", "x-b", "x-a-1.0.0.tar.gz", "x-b-1.0.0.tar.gz", "x-b-1.0.0.zip"]
        .into_iter()
        .map(str::to_string)
        .collect();
    assert_eq!(files_in(&pack)?, expected);
    assert!(!pack.join("x-a-1.0.0.zip").exists());

    let entries = tar_gz_entries(&pack.join("x-a-1.0.0.tar.gz"))?;
    let expected: BTreeSet<String> = ["x-a", "x-a/x", "x-a/README.md", "x-a/CHANGELOG.md", "x-a/LICENSE"]
        .into_iter()
        .map(str::to_string)
        .collect();
    assert_eq!(entries, expected);

    let zip = zip::ZipArchive::new(File::open(pack.join("x-b-1.0.0.zip"))?)?;
    let names: BTreeSet<&str> = zip.file_names().collect();
    assert_eq!(
        names,
        BTreeSet::from(["x-b/x", "x-b/README.md", "x-b/CHANGELOG.md", "x-b/LICENSE"])
    );
    Ok(())
}

#[test]
fn test_pack_target_over_the_default_matrix() -> Result<()> {
    let temp = project_with_assets(&ASSETS)?;
    let model = build_model(QixConfigFile::default(), temp.path())?;
    let mut odin = FakeOdin::default();

    perform_main_work(&CliArgs::parse_from(["", "pack"]), &model, Path::new("odin"), &mut odin)?;

    let pack = temp.path().join("pack");
    let files = files_in(&pack)?;
    let tar_gz = files.iter().filter(|f| f.ends_with("-0.1.0.tar.gz")).count();
    let zips: Vec<&String> = files.iter().filter(|f| f.ends_with(".zip")).collect();

    assert_eq!(odin.outputs.len(), 10);
    assert_eq!(tar_gz, 10);
    assert_eq!(zips, ["qix-windows_amd64-0.1.0.zip"]);
    assert_eq!(
        odin.outputs[0],
        pack.join("qix-windows_amd64").join("qix.exe")
    );

    for entry in &model.pack.platforms {
        let entries = tar_gz_entries(&pack.join(format!("{}-0.1.0.tar.gz", entry.identifier)))?;
        assert!(entries.iter().all(|e| e.starts_with(&entry.identifier)));
        for asset in ASSETS {
            assert!(entries.contains(&format!("{}/{asset}", entry.identifier)));
        }
        assert!(entries.contains(&format!("{}/{}", entry.identifier, entry.binary_name("qix"))));
    }
    Ok(())
}

#[test]
fn test_repackaging_is_idempotent_for_binaries_and_assets() -> Result<()> {
    let temp = project_with_assets(&ASSETS)?;
    let config = qix_cfg_from_file(
        "[pack]\nplatforms = [ { target = 'linux_amd64' }, { target = 'windows_amd64', zip = true } ]\n",
    )?;
    let model = build_model(config, temp.path())?;
    let cli_args = CliArgs::parse_from(["", "pack"]);

    let snapshot = |dir: &Path| -> Result<Vec<(String, Vec<u8>)>> {
        let mut files = vec![];
        for name in files_in(dir)? {
            files.push((name.clone(), fs::read(dir.join(&name))?));
        }
        Ok(files)
    };

    perform_main_work(&cli_args, &model, Path::new("odin"), &mut FakeOdin::default())?;
    let first = snapshot(&temp.path().join("pack").join("qix-windows_amd64"))?;

    perform_main_work(&cli_args, &model, Path::new("odin"), &mut FakeOdin::default())?;
    let second = snapshot(&temp.path().join("pack").join("qix-windows_amd64"))?;

    assert_eq!(first, second);
    assert_eq!(first.len(), 4);
    Ok(())
}

#[test]
fn test_missing_asset_keeps_the_previous_platforms_archives() -> Result<()> {
    let temp = project_with_assets(&ASSETS)?;
    let config = qix_cfg_from_file(
        "[pack]\nplatforms = [ { target = 'linux_amd64' }, { target = 'windows_amd64', zip = true } ]\n",
    )?;
    let model = build_model(config, temp.path())?;
    let pack = temp.path().join("pack");

    // The license disappears once the first platform is already packaged
    struct RemoveLicenseAfterFirst<'a> {
        inner: FakeOdin,
        license: &'a Path,
    }

    impl Invoker for RemoveLicenseAfterFirst<'_> {
        fn invoke(&mut self, command: &CompilerCommand) -> Result<ExitStatus> {
            if !self.inner.outputs.is_empty() && self.license.exists() {
                fs::remove_file(self.license)?;
            }
            self.inner.invoke(command)
        }
    }

    let license = temp.path().join("LICENSE");
    let mut odin = RemoveLicenseAfterFirst {
        inner: FakeOdin::default(),
        license: &license,
    };
    let err = perform_main_work(&CliArgs::parse_from(["", "pack"]), &model, Path::new("odin"), &mut odin)
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<BuildError>(),
        Some(BuildError::AssetMissing { platform, .. }) if platform == "qix-windows_amd64"
    ));
    assert!(pack.join("qix-linux_amd64-0.1.0.tar.gz").is_file());
    assert!(!pack.join("qix-windows_amd64-0.1.0.tar.gz").exists());
    assert!(!pack.join("qix-windows_amd64-0.1.0.zip").exists());
    Ok(())
}
