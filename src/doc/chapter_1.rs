/*!
# Words

The stack holds two kinds of values. Integers are signed 32-bit numbers;
arithmetic wraps around instead of overflowing. Anything else that is not
a word is a name, pushed as written. Names are how you refer to variables.

The notation `( before -- after )` shows the top of the stack before and
after a word runs, with the top on the right.

| Word | Effect | |
|---|---|---|
| `+` | ( a b -- a+b ) | |
| `-` | ( a b -- a-b ) | |
| `*` | ( a b -- a*b ) | |
| `mod` | ( a b -- a mod b ) | the sign follows `a`; `b` of 0 gives 0 |
| `neg` | ( a -- -a ) | |
| `dup` | ( a -- a a ) | |
| `drop` | ( a -- ) | |
| `swap` | ( a b -- b a ) | |
| `over` | ( a b -- a b a ) | |
| `nip` | ( a b -- b ) | |
| `tuck` | ( a b -- b a b ) | |
| `.` | ( a -- ) | prints `a` |
| `.s` | ( -- ) | prints the stack, bottom first |
| `variable` | ( -- ) | takes the next word on the line as a name |
| `!` or `store` | ( n name -- ) | |
| `@` or `fetch` | ( name -- n ) | |

`dup`, `drop`, `neg` and `.` do nothing on an empty stack. Every other
word reports `STACK UNDERFLOW` when there isn't enough on the stack and
leaves it alone.

Words that need integers stop the program with `TYPE MISMATCH` when they
find a name instead. `dup`, `drop`, `over` and `.` accept names.
*/
