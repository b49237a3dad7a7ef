#[cfg(test)]
mod parser_tests {
    use minnow::ast::{Expr, LiteralValue, Stmt};
    use minnow::ast_printer::AstPrinter;
    use minnow::diagnostics::Diagnostics;
    use minnow::parser::Parser;
    use minnow::scanner::scan_tokens;

    fn parse_source(source: &str) -> (Vec<Stmt>, bool) {
        let mut diagnostics = Diagnostics::new();
        let tokens = scan_tokens(source.as_bytes(), &mut diagnostics);
        let mut parser = Parser::new(tokens, 0, &mut diagnostics);
        let statements = parser.parse();
        (statements, diagnostics.had_error())
    }

    /// Parse a single expression statement and render it in prefix form.
    fn print_expression(source: &str) -> String {
        let (statements, had_error) = parse_source(source);
        assert!(!had_error, "unexpected parse error in {:?}", source);
        assert_eq!(statements.len(), 1);

        match &statements[0] {
            Stmt::Expression(expr) | Stmt::Print(expr) => AstPrinter::print(expr),
            other => panic!("expected an expression statement, got {:?}", other),
        }
    }

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        assert_eq!(print_expression("1 + 2 * 3;"), "(+ 1.0 (* 2.0 3.0))");
    }

    #[test]
    fn subtraction_associates_left() {
        assert_eq!(print_expression("1 - 2 - 3;"), "(- (- 1.0 2.0) 3.0)");
    }

    #[test]
    fn assignment_associates_right() {
        assert_eq!(print_expression("a = b = c;"), "(= a (= b c))");
    }

    #[test]
    fn grouping_overrides_precedence() {
        assert_eq!(
            print_expression("(1 + 2) * 3;"),
            "(* (group (+ 1.0 2.0)) 3.0)"
        );
    }

    #[test]
    fn unary_operators_nest() {
        assert_eq!(print_expression("!!true;"), "(! (! true))");
        assert_eq!(print_expression("--1;"), "(- (- 1.0))");
    }

    #[test]
    fn comparison_binds_tighter_than_equality() {
        assert_eq!(
            print_expression("1 < 2 == true;"),
            "(== (< 1.0 2.0) true)"
        );
    }

    #[test]
    fn and_binds_tighter_than_or() {
        assert_eq!(print_expression("a or b and c;"), "(or a (and b c))");
    }

    #[test]
    fn calls_chain_and_recurse_into_the_callee() {
        assert_eq!(print_expression("f(1, 2);"), "(call f 1.0 2.0)");
        assert_eq!(print_expression("f(1)(2);"), "(call (call f 1.0) 2.0)");
    }

    #[test]
    fn for_desugars_to_a_while_in_a_block() {
        let (statements, had_error) =
            parse_source("for (var i = 0; i < 3; i = i + 1) print i;");
        assert!(!had_error);
        assert_eq!(statements.len(), 1);

        // { var i = 0; while (i < 3) { print i; i = i + 1; } }
        let outer = match &statements[0] {
            Stmt::Block(stmts) => stmts,
            other => panic!("expected outer block, got {:?}", other),
        };
        assert_eq!(outer.len(), 2);
        assert!(matches!(&outer[0], Stmt::Var { name, .. } if name.lexeme == "i"));

        let (condition, body) = match &outer[1] {
            Stmt::While { condition, body } => (condition, body),
            other => panic!("expected while, got {:?}", other),
        };
        assert_eq!(AstPrinter::print(condition), "(< i 3.0)");

        let inner = match body.as_ref() {
            Stmt::Block(stmts) => stmts,
            other => panic!("expected body block, got {:?}", other),
        };
        assert_eq!(inner.len(), 2);
        assert!(matches!(&inner[0], Stmt::Print(_)));
        assert!(matches!(&inner[1], Stmt::Expression(Expr::Assign { .. })));
    }

    #[test]
    fn for_without_clauses_loops_on_true() {
        let (statements, had_error) = parse_source("for (;;) print 1;");
        assert!(!had_error);

        // No initializer, so there is no outer block.
        let condition = match &statements[0] {
            Stmt::While { condition, .. } => condition,
            other => panic!("expected while, got {:?}", other),
        };
        assert!(matches!(condition, Expr::Literal(LiteralValue::True)));
    }

    #[test]
    fn invalid_assignment_target_is_not_fatal() {
        let (statements, had_error) = parse_source("a + b = c;");

        assert!(had_error);
        // The already-parsed left-hand side survives as the statement.
        assert_eq!(statements.len(), 1);
        assert!(matches!(
            &statements[0],
            Stmt::Expression(Expr::Binary { .. })
        ));
    }

    #[test]
    fn argument_cap_reports_but_keeps_the_extras() {
        let args: Vec<String> = (0..256).map(|i| i.to_string()).collect();
        let source = format!("f({});", args.join(", "));

        let (statements, had_error) = parse_source(&source);

        assert!(had_error);
        assert_eq!(statements.len(), 1);

        let arguments = match &statements[0] {
            Stmt::Expression(Expr::Call { arguments, .. }) => arguments,
            other => panic!("expected call, got {:?}", other),
        };
        assert_eq!(arguments.len(), 256);
    }

    #[test]
    fn parameter_cap_reports_but_keeps_the_extras() {
        let params: Vec<String> = (0..256).map(|i| format!("p{}", i)).collect();
        let source = format!("fun big({}) {{}}", params.join(", "));

        let (statements, had_error) = parse_source(&source);

        assert!(had_error);
        assert_eq!(statements.len(), 1);

        let declaration = match &statements[0] {
            Stmt::Function(declaration) => declaration,
            other => panic!("expected function, got {:?}", other),
        };
        assert_eq!(declaration.params.len(), 256);
    }

    #[test]
    fn synchronization_recovers_at_statement_boundaries() {
        // The broken declaration is discarded; the print after the ';'
        // still parses.
        let (statements, had_error) = parse_source("var = 1; print 2;");

        assert!(had_error);
        assert_eq!(statements.len(), 1);
        assert!(matches!(&statements[0], Stmt::Print(_)));
    }

    #[test]
    fn reserved_keyword_at_statement_position_is_an_error() {
        let (statements, had_error) = parse_source("class Foo {}");

        assert!(had_error);
        assert!(statements.is_empty());
    }

    #[test]
    fn error_at_eof_reports_at_end() {
        let (statements, had_error) = parse_source("1 +");

        assert!(had_error);
        assert!(statements.is_empty());
    }

    #[test]
    fn function_declaration_shape() {
        let (statements, had_error) = parse_source("fun add(a, b) { return a + b; }");
        assert!(!had_error);

        let declaration = match &statements[0] {
            Stmt::Function(declaration) => declaration,
            other => panic!("expected function, got {:?}", other),
        };
        assert_eq!(declaration.name.lexeme, "add");
        assert_eq!(declaration.params.len(), 2);
        assert_eq!(declaration.body.len(), 1);
        assert!(matches!(&declaration.body[0], Stmt::Return { .. }));
    }

    #[test]
    fn expression_ids_increase_across_parses() {
        let mut diagnostics = Diagnostics::new();

        let tokens = scan_tokens(b"a; b;", &mut diagnostics);
        let mut parser = Parser::new(tokens, 0, &mut diagnostics);
        parser.parse();
        let watermark = parser.next_id();
        assert!(watermark >= 2);

        // Seeding a second parser continues where the first left off.
        let tokens = scan_tokens(b"c;", &mut diagnostics);
        let mut parser = Parser::new(tokens, watermark, &mut diagnostics);
        let statements = parser.parse();

        match &statements[0] {
            Stmt::Expression(Expr::Variable { id, .. }) => assert_eq!(*id, watermark),
            other => panic!("expected variable, got {:?}", other),
        }
    }
}
