#![doc = r#"
ARITH — a small integer arithmetic demonstrator.

This crate provides a typed API for the classic two-operand pipeline: parse
two integers, compute their product and (when the divisor is non-zero) the
truncating quotient and remainder, and render a fixed-layout report. It
powers the `add` CLI and can be embedded in your own Rust applications.

Quick start: evaluate raw operands
----------------------------------
```rust
use arith::{all_successful, evaluate};

fn main() -> arith::Result<()> {
    let result = evaluate(&["10", "3"])?;
    assert_eq!(result.mul, 30);
    assert_eq!(result.div.unwrap().quotient, 3);
    assert_eq!(result.div.unwrap().remainder, 1);
    assert!(all_successful(&result));
    Ok(())
}
```

Typed pipeline (when you already have integers)
-----------------------------------------------
```rust
use arith::{run_computation, render, UserInput};

let result = run_computation(UserInput { a: -7, b: 2 });
// Truncating toward zero: -7 / 2 == -3 rem -1
assert_eq!(result.div.unwrap().quotient, -3);
print!("{}", render(&result));
```

Division by zero
----------------
A zero divisor never panics and never fabricates a `div:` block: the
division result is simply absent, and [`all_successful`] reports failure.

```rust
use arith::{all_successful, run_computation, UserInput};

let result = run_computation(UserInput { a: 5, b: 0 });
assert!(result.div.is_none());
assert!(!all_successful(&result));
```

Error handling
--------------
Fallible entrypoints return `arith::Result<T>`; match on [`Error`] to handle
specific cases.

```rust
use arith::{evaluate, Error};

match evaluate(&["7"]) {
    Err(Error::InvalidArgumentCount { got }) => assert_eq!(got, 1),
    other => panic!("expected count error, got {other:?}"),
}
```

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`core`] — parse-or-zero conversion and arithmetic primitives.
- [`report`] — the fixed-layout report writer.
- [`types`] — the `UserInput` / `DivisionResult` / `Computation` data model.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod report;
pub mod types;

// Curated public API surface
// Types
pub use error::{Error, Result};
pub use types::{Computation, DivisionResult, UserInput};

// Reporter
pub use report::{render, write_report};

// High-level API re-exports
pub use api::{all_successful, evaluate, run_computation};
