#![doc = r#"
Payloads of the non-meta events found in a track

# Hierarchy
```text
                   |---------------|
                   | Track Message |
                   |---------------|
                  /        |        \
|-----------------------|  |  |--------------------------|
| Channel Voice Message |  |  | System Exclusive Message |
|-----------------------|  |  |--------------------------|
                    |--------------|
                    | Meta Message |
                    |--------------|
```

Meta messages only exist inside files and live in [`crate::file::meta`].
"#]

pub mod channel;
pub mod system_exclusive;
