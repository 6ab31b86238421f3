//! Property tests for package info derivation

use lytc_config::{derive_package_info, resolve_paths, PackageList};
use lytc_types::{ArchiveFormat, PackageSpec, Profile, UrlLayout, PACKAGES};
use proptest::prelude::*;
use std::path::Path;

fn archive() -> impl Strategy<Value = ArchiveFormat> {
    prop_oneof![Just(ArchiveFormat::TarBz2), Just(ArchiveFormat::TarGz)]
}

fn layout() -> impl Strategy<Value = UrlLayout> {
    prop_oneof![
        Just(UrlLayout::Flat),
        Just(UrlLayout::NestedByName),
        Just(UrlLayout::NestedByVersion),
    ]
}

proptest! {
    #[test]
    fn derivation_is_deterministic(
        name in "[a-z][a-z0-9-]{0,12}",
        version in "[0-9][0-9a-z.+ -]{0,10}",
        repo in "[ -~]{0,40}",
        archive in archive(),
        layout in layout(),
    ) {
        let spec = PackageSpec::new(version, repo);
        let first = derive_package_info(&name, &spec, archive, layout);
        let second = derive_package_info(&name, &spec, archive, layout);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn names_are_exact_concatenations(
        name in "[a-z][a-z0-9-]{0,12}",
        version in "[ -~]{0,16}",
        repo in "[ -~]{0,40}",
        archive in archive(),
        layout in layout(),
    ) {
        let spec = PackageSpec::new(version.clone(), repo.clone());
        let info = derive_package_info(&name, &spec, archive, layout);

        let versioned = format!("{name}-{version}");
        prop_assert_eq!(&info.versioned_name, &versioned);
        prop_assert_eq!(&info.tarball_name, &format!("{versioned}{}", archive.extension()));
        prop_assert!(info.tarball_url.starts_with(&repo));
        prop_assert!(info.tarball_url.ends_with(&info.tarball_name));

        let expected = match layout {
            UrlLayout::Flat => format!("{repo}{}", info.tarball_name),
            UrlLayout::NestedByName => format!("{repo}{versioned}/{}", info.tarball_name),
            UrlLayout::NestedByVersion => format!("{repo}{version}/{}", info.tarball_name),
        };
        prop_assert_eq!(info.tarball_url, expected);
    }

    #[test]
    fn parsed_fields_round_trip_through_resolution(
        version in "[0-9]{1,2}\\.[0-9]{1,2}(\\.[0-9]{1,2})?",
        host in "[a-z]{1,10}",
    ) {
        let mut text = String::new();
        for def in PACKAGES {
            text.push_str(&format!(
                "[{}]\nversion = {version}\nrepo = https://{host}.org/{}/\n\n",
                def.name, def.name
            ));
        }
        let list = PackageList::parse("generated.list", &text).unwrap();
        for def in PACKAGES {
            let spec = list.package_spec(def.name).unwrap();
            prop_assert_eq!(&spec.version, &version);
            prop_assert_eq!(spec.repo, format!("https://{host}.org/{}/", def.name));
        }
    }

    #[test]
    fn paths_are_joined_below_root(dir in "/[a-z]{1,8}(/[a-z]{1,8}){0,3}") {
        let root = Path::new(&dir);
        let paths = resolve_paths(root, Profile::Full, "i686-pc-lyos");
        prop_assert_eq!(paths.prefix.clone(), root.join("local"));
        prop_assert_eq!(paths.prefix_bin, root.join("local").join("bin"));
        prop_assert_eq!(paths.sysroot, Some(root.join("../sysroot")));
    }
}
