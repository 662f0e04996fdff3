/// Generate a per-source fetch function.
///
/// The generated function picks the first connector whose `accessor` returns a
/// provider, then runs `call` on its own task under the source's timeout. With
/// no capable connector it fails with `Unsupported` and never touches the network.
macro_rules! source_fetcher {
    (
        $(#[$meta:meta])*
        fn $name:ident -> $ret:ty,
        source: $source:expr,
        accessor: $accessor:ident,
        call: $call:ident
    ) => {
        $(#[$meta])*
        pub(crate) async fn $name(
            connectors: &[std::sync::Arc<dyn gradeboard_core::DashboardConnector>],
            cfg: &gradeboard_core::DashboardConfig,
        ) -> Result<$ret, gradeboard_core::DashboardError> {
            let source: gradeboard_core::SourceKind = $source;
            let Some(c) = connectors.iter().find(|c| c.$accessor().is_some()) else {
                return Err(gradeboard_core::DashboardError::unsupported(source.as_str()));
            };
            let c2 = std::sync::Arc::clone(c);
            $crate::cycle::util::source_call_with_timeout(
                c.name(),
                source,
                cfg.timeout_for(source),
                async move {
                    if let Some(p) = c2.$accessor() {
                        p.$call().await
                    } else {
                        Err(gradeboard_core::DashboardError::connector(
                            c2.name(),
                            concat!("missing ", stringify!($call), " capability during call"),
                        ))
                    }
                },
            )
            .await
        }
    };
}

pub(crate) use source_fetcher;
