/*!
# Instruction Set

Source is free form. Tokens are separated by spaces or tabs and everything
after a `;` on a line is a comment. Case does not matter.

```text
; count down from 3
        LIT 3
:LOOP   LIT 1 -
        DUP IF :DONE
        LIT 0 IF :LOOP
:DONE   HALT
```

A token starting with `:` in place of an instruction defines a label. The
label takes no memory; it names the address of whatever follows. The same
token after `LIT`, `IF` or `CALL` is replaced by that address.

Literals are decimal unless prefixed: `B101` is binary, `X1F` and `0X1F`
are hexadecimal. An operand of `LIT`, `IF` or `CALL` is rejected when its
magnitude has any bit from 8 to 15 set: `LIT 256` fails, `LIT 255` and
`LIT 65536` assemble. A bare literal in place of an instruction is stored
as a data cell without range checks.

| Mnemonic | Code    | Cells | Stack effect          |
|----------|---------|-------|-----------------------|
| `LIT n`  | `FF00`  | 2     | ( -- n )              |
| `@`      | `FF01`  | 1     | ( addr -- value )     |
| `!`      | `FF02`  | 1     | ( value addr -- )     |
| `DROP`   | `FF03`  | 1     | ( a -- )              |
| `DUP`    | `FF04`  | 1     | ( a -- a a )          |
| `OVER`   | `FF05`  | 1     | ( a b -- a b a )      |
| `SWAP`   | `FF06`  | 1     | ( a b -- b a )        |
| `+`      | `FF07`  | 1     | ( a b -- a+b )        |
| `-`      | `FF08`  | 1     | ( a b -- a-b )        |
| `AND`    | `FF09`  | 1     | ( a b -- a&b )        |
| `OR`     | `FF0A`  | 1     | ( a b -- a\|b )       |
| `XOR`    | `FF0B`  | 1     | ( a b -- a^b )        |
| `IF a`   | `FF0C`  | 2     | ( flag -- ) jump to a when flag is 0 |
| `CALL a` | `FF0D`  | 2     | R: ( -- ret ) jump to a |
| `EXIT`   | `FF0E`  | 1     | R: ( ret -- ) jump to ret |
| `HALT`   | `FF0F`  | 1     | stop                  |
| `>R`     | `FF10`  | 1     | ( a -- ) R: ( -- a )  |
| `R>`     | `FF11`  | 1     | ( -- a ) R: ( a -- )  |

Both stacks hold up to 255 words. `@` reads 0 outside memory and `!`
ignores stores outside memory. Running off the end of memory, an empty or
full stack, or a word that is not an instruction stops the machine with an
error at that address.

*/
