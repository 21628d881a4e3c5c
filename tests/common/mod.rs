#![allow(dead_code)]
use stackcpu::lang::Error;
use stackcpu::mach::Runtime;

pub fn compile(source: &str) -> Runtime {
    compile_n(source, 32)
}

pub fn compile_n(source: &str, mem_size: usize) -> Runtime {
    let mut r = Runtime::default();
    r.set_mem_size(mem_size);
    r.set_lines(&source.lines().collect::<Vec<&str>>());
    if let Err(error) = r.compile() {
        panic!("compile failed: {:?}", error);
    }
    r
}

pub fn compile_err(source: &str) -> Error {
    let mut r = Runtime::default();
    r.set_lines(&source.lines().collect::<Vec<&str>>());
    match r.compile() {
        Ok(()) => panic!("compiled: {}", source),
        Err(error) => error,
    }
}

pub fn run(source: &str) -> Runtime {
    let mut r = compile(source);
    if let Err(error) = r.run() {
        panic!("run failed: {:?}", error);
    }
    r
}

pub fn image(r: &Runtime) -> Vec<i32> {
    (0..r.memory_len()).filter_map(|i| r.memory(i)).collect()
}
