use crate::core::{Output, PatternResult};
use crate::factory_method::generic::{client_code, ConcreteFactory1, ConcreteFactory2, Factory};

/// 2つの具象ファクトリーでクライアントコードを実行する
pub fn execute_factory_method_generic(out: &dyn Output) -> PatternResult<()> {
    let factories: [(&str, &dyn Factory); 2] = [
        ("ConcreteFactory1", &ConcreteFactory1),
        ("ConcreteFactory2", &ConcreteFactory2),
    ];

    for (index, (name, factory)) in factories.into_iter().enumerate() {
        if index > 0 {
            out.blank();
        }
        out.line(&format!("App: Launched with {name}"));
        client_code(factory, out);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RecordingOutput;

    #[test]
    fn test_trace() {
        let output = RecordingOutput::new();
        execute_factory_method_generic(&output).unwrap();

        assert_eq!(
            output.lines(),
            vec![
                "App: Launched with ConcreteFactory1",
                "Client: implementing Factory - Performing core factory functions using \
                 Result of concrete product 1 operation",
                "",
                "App: Launched with ConcreteFactory2",
                "Client: implementing Factory - Performing core factory functions using \
                 Result of concrete product 2 operation",
            ]
        );
    }
}
