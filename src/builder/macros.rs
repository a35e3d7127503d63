//! Macros for ergonomic configuration construction.

/// Build a [`MachineConfig`](crate::config::MachineConfig) from a literal
/// description of its states.
///
/// Expands to a [`ConfigBuilder`](crate::builder::ConfigBuilder) chain and
/// evaluates to its `build()` result.
///
/// # Example
///
/// ```
/// use waymark::machine_config;
///
/// let config = machine_config! {
///     initial: "idle",
///     states: {
///         "idle" => { "start" => "running" },
///         "running" => { "stop" => "idle", "fail" => "broken" },
///         "broken" => {},
///     }
/// }
/// .unwrap();
///
/// assert_eq!(config.initial, "idle");
/// assert_eq!(config.states.len(), 3);
/// ```
#[macro_export]
macro_rules! machine_config {
    (
        initial: $initial:expr,
        states: {
            $(
                $state:expr => { $($event:expr => $target:expr),* $(,)? }
            ),* $(,)?
        } $(,)?
    ) => {{
        let builder = $crate::builder::ConfigBuilder::new().initial($initial);
        $(
            let builder = builder.state(
                $state,
                ::std::vec::Vec::<(::std::string::String, ::std::string::String)>::from([
                    $((
                        ::std::convert::Into::into($event),
                        ::std::convert::Into::into($target),
                    )),*
                ]),
            );
        )*
        builder.build()
    }};
}
