mod common;

use cmakegen::error::Error;
use cmakegen::expander::{
    expand_sub_projects, single_target_document, TargetKind, TargetWiring, TestFramework,
};
use cmakegen::fs::{DirectoryEntry, LocalFileSystem};
use cmakegen::renderer::MiniJinjaRenderer;
use cmakegen::writer::BuildOptions;
use common::{config, include_dirs, MemoryFileSystem, Toggles};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn wiring() -> TargetWiring {
    TargetWiring {
        library: "gamma".to_string(),
        build: BuildOptions::from_config(&config(Toggles::default())).unwrap(),
        source_include_dirs: vec!["/work/gamma/src".to_string(), "/work/alpha/src".to_string()],
        link_prefixes: vec!["/install/gamma".to_string()],
        dependencies: Vec::new(),
    }
}

fn test_kind() -> TargetKind {
    TargetKind::Test(TestFramework {
        include_dir: "/opt/gtest/include".to_string(),
        library_dir: "/opt/gtest/lib".to_string(),
    })
}

fn statement_value<'a>(contents: &'a str, prefix: &str) -> &'a str {
    contents
        .lines()
        .find_map(|line| line.strip_prefix(prefix))
        .and_then(|rest| rest.strip_suffix(')'))
        .unwrap()
}

#[test]
fn test_one_descriptor_per_directory() {
    let fs = MemoryFileSystem::new()
        .with_dir("/work/gamma/tests/case1")
        .with_dir("/work/gamma/tests/case2/data")
        .with_dir("/work/gamma/tests/test_thread_pool");

    let written = expand_sub_projects(
        &fs,
        &MiniJinjaRenderer::new(),
        &wiring(),
        Path::new("/work/gamma/tests"),
        &test_kind(),
    )
    .unwrap();

    let expected: BTreeSet<String> =
        ["case1", "case2", "test_thread_pool"].iter().map(|s| s.to_string()).collect();
    assert_eq!(written.len(), expected.len());
    assert_eq!(fs.written().len(), expected.len());

    let mut executables = BTreeSet::new();
    for path in &written {
        let contents = fs.read(path).unwrap();
        let name = statement_value(&contents, "SET(EXECUTABLE ").to_string();
        assert_eq!(statement_value(&contents, "SET(SOURCE "), format!("{name}.cpp"));
        assert_eq!(path, &PathBuf::from("/work/gamma/tests").join(&name).join("CMakeLists.txt"));
        executables.insert(name);
    }
    assert_eq!(executables, expected);
}

#[test]
fn test_empty_directory_writes_nothing() {
    let fs = MemoryFileSystem::new().with_dir("/work/gamma/examples");
    let written = expand_sub_projects(
        &fs,
        &MiniJinjaRenderer::new(),
        &wiring(),
        Path::new("/work/gamma/examples"),
        &TargetKind::Example,
    )
    .unwrap();
    assert!(written.is_empty());
    assert!(fs.written().is_empty());
}

#[test]
fn test_missing_directory_is_filesystem_error() {
    let fs = MemoryFileSystem::new();
    let result = expand_sub_projects(
        &fs,
        &MiniJinjaRenderer::new(),
        &wiring(),
        Path::new("/work/gamma/examples"),
        &TargetKind::Example,
    );
    assert!(matches!(result, Err(Error::Filesystem { .. })));
}

#[test]
fn test_files_are_not_sub_projects() {
    let temp_dir = TempDir::new().unwrap();
    let tests_dir = temp_dir.path().join("tests");
    std::fs::create_dir_all(tests_dir.join("case1")).unwrap();
    std::fs::write(tests_dir.join("README.md"), "notes").unwrap();
    std::fs::write(tests_dir.join("CMakeLists.txt"), "stale").unwrap();

    let written = expand_sub_projects(
        &LocalFileSystem::new(),
        &MiniJinjaRenderer::new(),
        &wiring(),
        &tests_dir,
        &test_kind(),
    )
    .unwrap();

    assert_eq!(written, vec![tests_dir.join("case1").join("CMakeLists.txt")]);
    let contents = std::fs::read_to_string(&written[0]).unwrap();
    assert!(contents.contains("PROJECT(case1 CXX)"));
    assert!(!contents.contains("\r\n"));
}

#[test]
fn test_single_target_layout() {
    let directory = DirectoryEntry { name: "demo".to_string(), path: PathBuf::from("/w/demo") };
    let document =
        single_target_document(&MiniJinjaRenderer::new(), &wiring(), &directory, &TargetKind::Example)
            .unwrap();

    assert_eq!(document.path(), Path::new("/w/demo/CMakeLists.txt"));
    assert!(document.contents().starts_with(
        "CMAKE_MINIMUM_REQUIRED(VERSION 3.6)\nPROJECT(demo CXX)\nSET(SOURCE demo.cpp)\nSET(EXECUTABLE demo)\n\n\
         SET(BOOST_INCLUDEDIR /opt/boost/include)\nFIND_PACKAGE(Boost REQUIRED)\n"
    ));
    assert!(document.contents().contains("FIND_PACKAGE(BLAS REQUIRED)\n"));
    assert!(document.contents().contains("SET(CMAKE_CXX_FLAGS \"-Wall -Wextra\")\n"));
    assert!(document
        .contents()
        .ends_with("TARGET_LINK_LIBRARIES(${EXECUTABLE} gamma)\nTARGET_LINK_LIBRARIES(${EXECUTABLE} pthread)\nTARGET_LINK_LIBRARIES(${EXECUTABLE} openblas)\n"));
    assert_eq!(
        include_dirs(document.contents()),
        vec!["/opt/blaze", "${Boost_INCLUDE_DIRS}", "/opt/json/include", "/work/gamma/src", "/work/alpha/src"]
    );
}

#[test]
fn test_test_kind_adds_framework_paths() {
    let directory = DirectoryEntry { name: "case1".to_string(), path: PathBuf::from("/w/case1") };
    let document =
        single_target_document(&MiniJinjaRenderer::new(), &wiring(), &directory, &test_kind()).unwrap();

    let contents = document.contents();
    assert!(contents.contains("INCLUDE_DIRECTORIES(/opt/gtest/include)\n"));
    assert!(contents.contains("LINK_DIRECTORIES(/opt/gtest/lib)\n"));
    assert!(contents.contains(
        "TARGET_LINK_LIBRARIES(${EXECUTABLE} gamma)\nTARGET_LINK_LIBRARIES(${EXECUTABLE} gtest)\n\
         TARGET_LINK_LIBRARIES(${EXECUTABLE} gtest_main)\n"
    ));
}

#[test]
fn test_openmp_option() {
    let yaml = common::config_yaml(Toggles::default()).replace("USE_OPENMP: false", "USE_OPENMP: true");
    let mut wiring = wiring();
    wiring.build =
        BuildOptions::from_config(&cmakegen::config::Configuration::parse(&yaml).unwrap()).unwrap();
    let directory = DirectoryEntry { name: "omp".to_string(), path: PathBuf::from("/w/omp") };
    let document =
        single_target_document(&MiniJinjaRenderer::new(), &wiring, &directory, &TargetKind::Example)
            .unwrap();

    assert!(document.contents().contains("FIND_PACKAGE(OpenMP REQUIRED)\n"));
    assert!(document.contents().contains("ADD_DEFINITIONS(-DUSE_OPENMP)\n"));
    assert!(!document.contents().contains("-DUSE_LOG"));
}
