//! Common constants used throughout cmakegen.

/// Supported configuration file names, looked up in the project root
pub const CONFIG_FILES: [&str; 3] = ["cmakegen.json", "cmakegen.yml", "cmakegen.yaml"];

/// File name of every generated descriptor
pub const DESCRIPTOR_FILE: &str = "CMakeLists.txt";

/// Minimum CMake version declared by every descriptor
pub const CMAKE_MINIMUM_VERSION: &str = "3.6";

/// Extension of C++ translation units
pub const SOURCE_EXTENSION: &str = "cpp";

/// Name of the per-module tests directory
pub const TESTS_DIR: &str = "tests";

/// Name of the per-module examples directory
pub const EXAMPLES_DIR: &str = "examples";

/// Test framework libraries linked into every test executable, in link order
pub const TEST_LIBRARIES: [&str; 2] = ["gtest", "gtest_main"];

/// Libraries linked into every single-target executable after the module library
pub const SYSTEM_LIBRARIES: [&str; 2] = ["pthread", "openblas"];
