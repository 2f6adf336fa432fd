//! `ports` list of a container.

use crate::podlint::parser::Node;
use crate::podlint::rules::{FieldRule, PROTOCOLS, Shape, apply_rules, check_one_of, check_port};
use crate::podlint::types::Diagnostics;

const PORT_RULES: &[FieldRule] = &[
    FieldRule::required("containerPort", Shape::Integer, check_container_port),
    FieldRule::optional("protocol", Shape::String, check_protocol),
];

pub fn validate_ports(ports: &Node, sink: &mut Diagnostics) {
    for entry in ports.as_sequence().unwrap_or_default() {
        if !entry.is_mapping() {
            sink.push(entry.line, "ports entry must be object");
            continue;
        }
        apply_rules(PORT_RULES, entry, sink);
    }
}

fn check_container_port(node: &Node, sink: &mut Diagnostics) {
    check_port(node, "containerPort", sink);
}

fn check_protocol(node: &Node, sink: &mut Diagnostics) {
    check_one_of(node, "protocol", PROTOCOLS, sink);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::podlint::rules::test_support::run;

    fn port(value: &str) -> Vec<(u32, String)> {
        run(&format!("- containerPort: {}\n", value), validate_ports)
    }

    #[test]
    fn test_integer_port_passes() {
        assert!(port("80").is_empty());
    }

    #[test]
    fn test_quoted_port_is_not_an_integer() {
        assert_eq!(port("\"80\""), vec![(1, "containerPort must be int".to_string())]);
        assert_eq!(port("'80'"), vec![(1, "containerPort must be int".to_string())]);
    }

    #[test]
    fn test_string_tagged_port_is_not_an_integer() {
        assert_eq!(port("!!str 80"), vec![(1, "containerPort must be int".to_string())]);
        assert!(port("!!int \"80\"").is_empty());
    }

    #[test]
    fn test_port_range_boundaries() {
        assert!(port("1").is_empty());
        assert!(port("65535").is_empty());
        assert_eq!(port("0"), vec![(1, "containerPort value out of range".to_string())]);
        assert_eq!(
            port("65536"),
            vec![(1, "containerPort value out of range".to_string())]
        );
    }

    #[test]
    fn test_non_integer_port_kinds() {
        assert_eq!(port("http"), vec![(1, "containerPort must be int".to_string())]);
        assert_eq!(port("80.5"), vec![(1, "containerPort must be int".to_string())]);
        assert_eq!(port("[80]"), vec![(1, "containerPort must be int".to_string())]);
    }

    #[test]
    fn test_protocol() {
        let ok = run("- containerPort: 53\n  protocol: UDP\n", validate_ports);
        assert!(ok.is_empty());
        let bad = run("- containerPort: 53\n  protocol: udp\n", validate_ports);
        assert_eq!(bad, vec![(2, "protocol has unsupported value 'udp'".to_string())]);
    }

    #[test]
    fn test_entries_checked_in_order() {
        let yaml = r#"- containerPort: 70000
- 8080
- protocol: TCP
"#;
        assert_eq!(
            run(yaml, validate_ports),
            vec![
                (1, "containerPort value out of range".to_string()),
                (2, "ports entry must be object".to_string()),
                (3, "containerPort is required".to_string()),
            ]
        );
    }
}
