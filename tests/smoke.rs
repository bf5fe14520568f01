use pretty_assertions::assert_eq;
use ptxasm_rs::{translate, translate_to_string, AsmError};

const KERNEL: &str = "\
//
// Generated by NVCC
//
.version 8.3
.target sm_89

.visible .entry _Z3addPiS_S_(
\t.param .u64 _Z3addPiS_S__param_0
)
{
\tmov.u32 %r1, %tid.x;
\tld.global.f32 %f1, [%rd1];
\tadd.s32 %r2, %r1, %r1;
\tst.global.f32 [%rd2], %f1;
\tret;
}
";

#[test]
fn kernel_listing_matches() {
    let out = translate_to_string(KERNEL).unwrap();
    let expected = "\
\n\
// =========================================\n\
// 🚀 .visible .entry _Z3addPiS_S_(\n\
// =========================================\n\
00111000000000000000000000000000 // mov.u32 %r1, %tid.x;\n\
00010100010010000000000000000000 // ld.global.f32 %f1, [%rd1];\n\
00000000110000000000000000000000 // add.s32 %r2, %r1, %r1;\n\
00011000000100000100000000000000 // st.global.f32 [%rd2], %f1;\n";
    assert_eq!(out, expected);
}

#[test]
fn one_banner_per_declaration() {
    let src = "\
.visible .entry a(
\tmov %r1, 1;
.entry b(
\tmov %r1, 2;
.func c(
\tret;
";
    let out = translate_to_string(src).unwrap();
    assert_eq!(out.matches("// 🚀 ").count(), 3);
    assert_eq!(
        out.matches("// =========================================")
            .count(),
        6
    );
}

#[test]
fn register_windows_are_independent_per_function() {
    let src = "\
.entry first(
\tadd %a, %b, %c;
.entry second(
\tmov %c, 7;
";
    let out = translate_to_string(src).unwrap();
    let words: Vec<&str> = out
        .lines()
        .filter(|l| !l.is_empty() && !l.starts_with("//"))
        .collect();
    assert_eq!(words.len(), 2);
    // %c was index 2 in the first window, but restarts at 0 in the second
    assert_eq!(words[1], "00011100000000000000000000000111 // mov %c, 7;");
}

#[test]
fn noise_between_instructions_does_not_disturb_allocation() {
    let with_noise = "\
.entry k(
\tmov %r1, 1;
.reg .b32 %r<4>;

// comment
\tadd %r2, %r1, %r1;
";
    let without_noise = "\
.entry k(
\tmov %r1, 1;
\tadd %r2, %r1, %r1;
";
    let a = translate_to_string(with_noise).unwrap();
    let b = translate_to_string(without_noise).unwrap();
    let words = |s: &str| {
        s.lines()
            .filter(|l| !l.is_empty() && !l.starts_with("//"))
            .map(|l| l.split_whitespace().next().unwrap().to_string())
            .collect::<Vec<_>>()
    };
    assert_eq!(words(&a), words(&b));
}

#[test]
fn register_overflow_halts_the_run() {
    let mut src = String::from(".entry big(\n");
    for i in 0..17 {
        src.push_str(&format!("\tmov %r{i}, 1;\n"));
    }
    let mut out = Vec::new();
    let err = translate(&src, &mut out).unwrap_err();
    match err {
        AsmError::RegisterOverflow { reg } => assert_eq!(reg, "%r16"),
        other => panic!("expected RegisterOverflow, got {other:?}"),
    }
    // everything encoded before the overflow stays written
    let written = String::from_utf8(out).unwrap();
    let encoded = written
        .lines()
        .filter(|l| !l.is_empty() && !l.starts_with("//"))
        .count();
    assert_eq!(encoded, 16);
}

#[test]
fn unknown_mnemonics_produce_no_output() {
    let src = "\
.entry k(
\tbra LBB0_1;
\tsetp.ge.s32 %p1, %r1, %r2;
\tmov %r1, 3;
";
    let out = translate_to_string(src).unwrap();
    let encoded: Vec<&str> = out
        .lines()
        .filter(|l| !l.is_empty() && !l.starts_with("//"))
        .collect();
    assert_eq!(encoded, ["00011100000000000000000000000011 // mov %r1, 3;"]);
}
