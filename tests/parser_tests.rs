use spi::ast::{
    Assign, AstPrinter, BinOp, BinaryOperator, Compound, Declaration, Expr, Num, Program,
    Statement, UnaryOp, UnaryOperator, Var,
};
use spi::frontend::{Lexer, Parser};
use spi::parse;
use spi::runtime::Number;
use spi::utils::errors::{ErrorKind, SpiError, SpiResult};

fn int(value: i64) -> Expr {
    Expr::Num(Num::new(Number::Integer(value)))
}

fn var(name: &str) -> Expr {
    Expr::Var(Var::new(name))
}

fn bin(left: Expr, op: BinaryOperator, right: Expr) -> Expr {
    Expr::BinOp(BinOp::new(left, op, right))
}

fn statements(program: &Program) -> &[Statement] {
    &program.block.compound_statement.children
}

fn render(source: &str) -> SpiResult<String> {
    AstPrinter::new().render(&parse(source)?)
}

#[test]
fn test_minimal_program() -> SpiResult<()> {
    let program = parse("PROGRAM Empty; BEGIN END.")?;
    assert_eq!(program.name, Var::new("Empty"));
    assert!(program.block.declarations.is_empty());
    assert_eq!(statements(&program), &[Statement::NoOp]);
    Ok(())
}

#[test]
fn test_parser_pulls_tokens_from_lexer() -> SpiResult<()> {
    let mut parser = Parser::new(Lexer::new("PROGRAM P; BEGIN x := 1 END."))?;
    let program = parser.parse()?;
    assert_eq!(
        statements(&program),
        &[Statement::Assign(Assign::new(Var::new("x"), int(1)))]
    );
    Ok(())
}

#[test]
fn test_var_declarations_expand_per_name() -> SpiResult<()> {
    let program = parse("PROGRAM T; VAR a, b : INTEGER; y : REAL; BEGIN END.")?;
    let declared: Vec<(String, String)> = program
        .block
        .declarations
        .iter()
        .map(|decl| match decl {
            Declaration::Var(decl) => (decl.var_node.name.clone(), decl.type_node.name.clone()),
            Declaration::Procedure(decl) => panic!("unexpected procedure {}", decl.proc_name),
        })
        .collect();
    assert_eq!(
        declared,
        vec![
            ("a".to_string(), "INTEGER".to_string()),
            ("b".to_string(), "INTEGER".to_string()),
            ("y".to_string(), "REAL".to_string()),
        ]
    );
    Ok(())
}

#[test]
fn test_procedures_and_nested_blocks() -> SpiResult<()> {
    let source = "
        PROGRAM Part12;
        VAR
           a : INTEGER;

        PROCEDURE P1;
        VAR
           a : REAL;
           k : INTEGER;

           PROCEDURE P2;
           VAR
              a, z : INTEGER;
           BEGIN {P2}
              z := 777;
           END;  {P2}

        BEGIN {P1}

        END;  {P1}

        BEGIN {Part12}
           a := 10;
        END.  {Part12}
    ";
    let program = parse(source)?;
    let declarations = &program.block.declarations;
    assert_eq!(declarations.len(), 2);
    let p1 = match &declarations[1] {
        Declaration::Procedure(decl) => decl,
        other => panic!("Expected procedure, got {:?}", other),
    };
    assert_eq!(p1.proc_name, "P1");
    assert_eq!(p1.block.declarations.len(), 3);
    match &p1.block.declarations[2] {
        Declaration::Procedure(p2) => {
            assert_eq!(p2.proc_name, "P2");
            assert_eq!(p2.block.declarations.len(), 2);
        }
        other => panic!("Expected nested procedure, got {:?}", other),
    }
    Ok(())
}

#[test]
fn test_left_associativity() -> SpiResult<()> {
    let program = parse("PROGRAM T; BEGIN x := 10 - 3 - 2 END.")?;
    let expected = bin(
        bin(int(10), BinaryOperator::Sub, int(3)),
        BinaryOperator::Sub,
        int(2),
    );
    assert_eq!(
        statements(&program),
        &[Statement::Assign(Assign::new(Var::new("x"), expected))]
    );
    Ok(())
}

#[test]
fn test_complex_expression_precedence() -> SpiResult<()> {
    let program = parse("PROGRAM T; BEGIN x := 1 + 2 * 3 DIV y / 4 - -5 END.")?;
    let product = bin(
        bin(
            bin(int(2), BinaryOperator::Mul, int(3)),
            BinaryOperator::IntegerDiv,
            var("y"),
        ),
        BinaryOperator::FloatDiv,
        int(4),
    );
    let expected = bin(
        bin(int(1), BinaryOperator::Add, product),
        BinaryOperator::Sub,
        Expr::UnaryOp(UnaryOp::new(UnaryOperator::Minus, int(5))),
    );
    assert_eq!(
        statements(&program),
        &[Statement::Assign(Assign::new(Var::new("x"), expected))]
    );
    Ok(())
}

#[test]
fn test_nested_begin_end() -> SpiResult<()> {
    let program = parse("PROGRAM T; BEGIN BEGIN a := 1; BEGIN END END; ; b := 2 END.")?;
    let inner = Compound::new(vec![
        Statement::Assign(Assign::new(Var::new("a"), int(1))),
        Statement::Compound(Compound::new(vec![Statement::NoOp])),
    ]);
    assert_eq!(
        statements(&program),
        &[
            Statement::Compound(inner),
            Statement::NoOp,
            Statement::Assign(Assign::new(Var::new("b"), int(2))),
        ]
    );
    Ok(())
}

#[test]
fn test_whitespace_and_comments_do_not_change_tree() -> SpiResult<()> {
    let compact = parse("PROGRAM T;VAR a:INTEGER;BEGIN a:=-(3+4)*2;END.")?;
    let spaced = parse(
        "PROGRAM T ; { program header }\n\
         VAR\n   a : INTEGER ;\n\
         BEGIN\n   a := - ( 3 + { seven } 4 ) * 2 ;\n\
         END . { done }\n",
    )?;
    assert_eq!(compact, spaced);
    Ok(())
}

#[test]
fn test_ast_printer() -> SpiResult<()> {
    let rendered = render("PROGRAM T; VAR a : INTEGER; BEGIN a := -(3 + 4) * 2; END.")?;
    assert_eq!(
        rendered,
        "PROGRAM T\n  VAR a : INTEGER\n  BEGIN\n    a := ((-(3 + 4)) * 2)\n  END\n"
    );
    Ok(())
}

#[test]
fn test_missing_factor_after_operator() {
    let result = parse("PROGRAM T; VAR a : INTEGER; BEGIN a := 1 +; END.");
    match result {
        Err(SpiError::SyntaxError { expected, .. }) => assert_eq!(expected, "ID"),
        other => panic!("Expected a SyntaxError, but got: {:?}", other),
    }
}

#[test]
fn test_missing_semicolon_between_statements() {
    let result = parse("PROGRAM T; BEGIN a := 1 b := 2 END.");
    match result {
        Err(e @ SpiError::UnexpectedToken { .. }) => assert_eq!(e.kind(), ErrorKind::Syntax),
        other => panic!("Expected an UnexpectedToken error, but got: {:?}", other),
    }
}

#[test]
fn test_trailing_input_after_program() {
    let result = parse("PROGRAM T; BEGIN END. extra");
    assert!(matches!(result, Err(SpiError::UnexpectedToken { .. })));
}

#[test]
fn test_missing_dot() {
    let result = parse("PROGRAM T; BEGIN END");
    match result {
        Err(SpiError::SyntaxError { expected, found, .. }) => {
            assert_eq!(expected, "DOT");
            assert_eq!(found, "Token(EOF, None)");
        }
        other => panic!("Expected a SyntaxError, but got: {:?}", other),
    }
}

#[test]
fn test_var_section_requires_a_declaration() {
    let result = parse("PROGRAM T; VAR BEGIN END.");
    assert!(matches!(result, Err(SpiError::SyntaxError { .. })));
}

#[test]
fn test_invalid_type_spec() {
    let result = parse("PROGRAM T; VAR a : BOOLEAN; BEGIN END.");
    assert!(matches!(result, Err(SpiError::SyntaxError { .. })));
}

#[test]
fn test_missing_program_header() {
    let result = parse("BEGIN END.");
    match result {
        Err(SpiError::SyntaxError { expected, .. }) => assert_eq!(expected, "PROGRAM"),
        other => panic!("Expected a SyntaxError, but got: {:?}", other),
    }
}

#[test]
fn test_syntax_error_line() {
    let result = parse("PROGRAM T;\nBEGIN\n  a := 1;\n  b := (2\nEND.");
    match result {
        Err(SpiError::SyntaxError { expected, line, .. }) => {
            assert_eq!(expected, "RPAREN");
            assert_eq!(line, 5);
        }
        other => panic!("Expected a SyntaxError, but got: {:?}", other),
    }
}

#[test]
fn test_lexical_error_surfaces_through_parser() {
    let result = parse("PROGRAM T; BEGIN a := 1 & 2 END.");
    assert!(matches!(result, Err(SpiError::UnknownCharacter { character: '&', .. })));
}

fn assert_too_deep(source: &str) {
    match parse(source) {
        Err(e @ SpiError::NestingTooDeep { .. }) => assert_eq!(e.kind(), ErrorKind::Syntax),
        other => panic!("Expected a NestingTooDeep error, but got: {:?}", other),
    }
}

fn assignment(expr: &str) -> String {
    format!("PROGRAM T; VAR a : INTEGER; BEGIN a := {} END.", expr)
}

#[test]
fn test_deep_unary_chain_is_rejected() {
    assert_too_deep(&assignment(&format!("{}1", "- ".repeat(100_000))));
}

#[test]
fn test_deep_parentheses_are_rejected() {
    let expr = format!("{}1{}", "(".repeat(100_000), ")".repeat(100_000));
    assert_too_deep(&assignment(&expr));
}

#[test]
fn test_deep_begin_blocks_are_rejected() {
    let source = format!(
        "PROGRAM T; BEGIN {} END.",
        format!("{}{}", "BEGIN ".repeat(100_000), "END ".repeat(100_000))
    );
    assert_too_deep(&source);
}

#[test]
fn test_long_operator_chain_is_rejected() {
    assert_too_deep(&assignment(&format!("{}1", "1 + ".repeat(100_000))));
}

#[test]
fn test_operator_chains_stack_across_parentheses() {
    let chain = "1 * ".repeat(150);
    assert_too_deep(&assignment(&format!("({}1) + {}1", chain, "1 + ".repeat(150))));
}

#[test]
fn test_moderate_nesting_is_accepted() -> SpiResult<()> {
    let program = parse(&assignment(&format!("{}1{}", "(".repeat(150), ")".repeat(150))))?;
    assert_eq!(
        statements(&program),
        &[Statement::Assign(Assign::new(Var::new("a"), int(1)))]
    );
    parse(&assignment(&format!("{}1", "- ".repeat(150))))?;
    parse(&assignment(&format!("{}1", "1 + ".repeat(150))))?;
    Ok(())
}
