use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Stack enforced and size limited vector
///
/// Underflow and overflow are `StackFault` errors. A failed operation
/// leaves the stack unchanged.

pub struct Stack<T> {
    capacity: usize,
    vec: Vec<T>,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.vec)
    }
}

impl<T: Clone> Stack<T> {
    pub fn new(capacity: usize) -> Stack<T> {
        Stack {
            capacity,
            vec: vec![],
        }
    }
    fn fault(&self) -> Error {
        error!(StackFault)
    }
    pub fn clear(&mut self) {
        self.vec.clear()
    }
    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }
    pub fn is_full(&self) -> bool {
        self.vec.len() >= self.capacity
    }
    pub fn as_slice(&self) -> &[T] {
        &self.vec
    }
    pub fn push(&mut self, val: T) -> Result<()> {
        if self.is_full() {
            return Err(self.fault());
        }
        self.vec.push(val);
        Ok(())
    }
    pub fn pop(&mut self) -> Result<T> {
        match self.vec.pop() {
            Some(v) => Ok(v),
            None => Err(self.fault()),
        }
    }
    pub fn pop_2(&mut self) -> Result<(T, T)> {
        if self.vec.len() < 2 {
            return Err(self.fault());
        }
        let two = self.pop()?;
        let one = self.pop()?;
        Ok((one, two))
    }
    /// Clone the entry `depth` places below the top.
    pub fn peek(&self, depth: usize) -> Result<T> {
        match self.vec.len().checked_sub(depth + 1) {
            Some(index) => Ok(self.vec[index].clone()),
            None => Err(self.fault()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_underflow() {
        let mut s: Stack<i32> = Stack::new(4);
        assert_eq!(s.pop().unwrap_err().code(), ErrorCode::StackFault);
        assert!(s.peek(0).is_err());
    }

    #[test]
    fn test_overflow_keeps_contents() {
        let mut s = Stack::new(2);
        s.push(1).unwrap();
        s.push(2).unwrap();
        assert!(s.is_full());
        assert!(s.push(3).is_err());
        assert_eq!(s.as_slice(), &[1, 2]);
    }

    #[test]
    fn test_pop_2_is_all_or_nothing() {
        let mut s = Stack::new(4);
        s.push(7).unwrap();
        assert!(s.pop_2().is_err());
        assert_eq!(s.as_slice(), &[7]);
        s.push(8).unwrap();
        assert_eq!(s.pop_2().unwrap(), (7, 8));
        assert!(s.is_empty());
    }

    #[test]
    fn test_peek_depth() {
        let mut s = Stack::new(4);
        s.push(1).unwrap();
        s.push(2).unwrap();
        assert_eq!(s.peek(0).unwrap(), 2);
        assert_eq!(s.peek(1).unwrap(), 1);
        assert!(s.peek(2).is_err());
    }
}
