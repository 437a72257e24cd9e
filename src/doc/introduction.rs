/*!
# Introductory Tutorial

Run the `forth` executable with no arguments to get an interactive
session. Type CTRL-D to exit.
<pre><code>&nbsp;  forth 0.1.0
&nbsp;> █
</code></pre>

Every line you type is run immediately. Numbers are pushed on to the
stack and words take their arguments from the stack. The word `.` pops
the top of the stack and prints it.

<pre><code>&nbsp;> 2 3 + .
&nbsp;  5
&nbsp;  ok
</code></pre>

Arguments are written before the word that uses them, so `10 4 -` is
ten minus four. Use `.s` to look at the whole stack without changing it.

<pre><code>&nbsp;> 10 4 - 7 .s
&nbsp;  [Bottom -> Top] [6, 7]
&nbsp;  ok
</code></pre>

The stack and any variables stay around between lines until you leave
the session. Start with `--fresh` if you would rather have every line
begin with nothing.

A backslash starts a comment that runs to the end of the line.

<pre><code>&nbsp;> 6 7 * . \ the answer
&nbsp;  42
&nbsp;  ok
</code></pre>

To run a program stored in a file, pass its name.
```text
forth program.fs
```

The same file can be compiled to 32-bit x86 assembly instead. The
output is NASM source that links against the C library's `printf`.
Errors are reported at compile time just as a run would report them.
```text
forth program.fs --emit-asm program.s
nasm -felf32 program.s -o program.o
gcc -m32 -no-pie program.o -o program
```
*/
