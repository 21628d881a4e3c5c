mod common;
use common::*;
use stackcpu::lang::ErrorCode;
use stackcpu::mach::Opcode;

const NESTED: &str = "
        CALL :OUTER     ; 0 1
        LIT 9           ; 2 3
        HALT            ; 4
:OUTER  CALL :INNER     ; 5 6
        CALL :INNER     ; 7 8
        EXIT            ; 9
:INNER  LIT 1           ; 10 11
        EXIT            ; 12
";

#[test]
fn test_step_into_follows_call() {
    let mut r = compile(NESTED);
    r.step_into().unwrap();
    assert_eq!(r.pc(), 5);
    assert_eq!(r.return_stack(), vec![2]);
    r.step_into().unwrap();
    assert_eq!(r.pc(), 10);
    assert_eq!(r.return_stack(), vec![2, 7]);
}

#[test]
fn test_step_over_nested_calls() {
    let mut r = compile(NESTED);
    r.step_over().unwrap();
    assert_eq!(r.pc(), 2);
    assert_eq!(r.data_stack(), vec![1, 1]);
    assert!(r.return_stack().is_empty());
    assert!(!r.halt());
}

#[test]
fn test_step_over_plain_instruction() {
    let mut r = compile(NESTED);
    r.step_over().unwrap();
    r.step_over().unwrap();
    assert_eq!(r.pc(), 4);
    assert_eq!(r.data_stack(), vec![1, 1, 9]);
    r.step_over().unwrap();
    assert!(r.halt());
}

#[test]
fn test_step_over_from_inside_subroutine() {
    let mut r = compile(NESTED);
    r.step_into().unwrap();
    assert_eq!(r.current_opcode(), Some(Opcode::Call));
    r.step_over().unwrap();
    assert_eq!(r.pc(), 7);
    assert_eq!(r.return_stack(), vec![2]);
}

#[test]
fn test_step_over_stops_at_halt() {
    let mut r = compile("CALL :SUB HALT :SUB LIT 3 HALT");
    r.step_over().unwrap();
    assert!(r.halt());
    assert_eq!(r.data_stack(), vec![3]);
    assert_eq!(r.return_stack(), vec![2]);
}

#[test]
fn test_step_over_stops_on_fault() {
    let mut r = compile("CALL :SUB HALT :SUB DROP EXIT");
    let e = r.step_over().unwrap_err();
    assert_eq!(e.code(), ErrorCode::StackFault);
    assert_eq!(e.addr(), 3);
    assert_eq!(r.pc(), 3);
    assert_eq!(r.error_addr(), Some(3));
}

#[test]
fn test_run_matches_stepping() {
    let mut stepped = compile(NESTED);
    while !stepped.halt() {
        stepped.step_into().unwrap();
    }
    let ran = run(NESTED);
    assert_eq!(stepped.data_stack(), ran.data_stack());
    assert_eq!(stepped.pc(), ran.pc());
}
