//! File Combiner
//!
//! 여러 텍스트 파일을 구분선과 함께 하나의 출력 파일로 합치는 도구.
//! 핵심 로직(선택 목록, 결합기)은 UI와 독립적으로 사용할 수 있다.
//!
//! ```no_run
//! use filecombiner::models::SelectionSet;
//! use filecombiner::system::Combiner;
//! use std::path::Path;
//!
//! let mut selection = SelectionSet::new();
//! selection.add(["/work/a.py", "/work/b.py"], Some("Python Files"));
//! let report = Combiner::new()
//!     .run(selection.snapshot(), Path::new("/work/combined.txt"))
//!     .expect("combine failed");
//! println!("{} files written", report.files_written);
//! ```

pub mod app;
pub mod config;
pub mod core;
pub mod logging;
pub mod models;
pub mod system;
pub mod ui;
pub mod utils;
