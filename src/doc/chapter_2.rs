/*!
# Variables and Errors

A variable is declared with `variable` followed by its name on the same
line. It starts out as 0. Declaring it again changes nothing.

```text
variable count
5 count !     \ store 5
count @ .     \ prints 5
```

Errors come in two kinds. Most are reported and the word that caused them
is skipped; the program keeps going with the next word. Anything the word
had already popped stays popped.

```text
?UNDEFINED VARIABLE IN 3 (4..5); y
```

The message gives the line and the character columns of the word. The
errors of this kind are `MISSING IDENTIFIER`, `INVALID NAME`,
`STACK UNDERFLOW`, `UNDEFINED VARIABLE` and `INVALID VALUE`.

`TYPE MISMATCH` is different. A program that does arithmetic on a name
has nothing sensible to continue with, so it stops there. Running with
`--recover` reports it like the others instead.
*/
