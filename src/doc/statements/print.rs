/*!
# `PRINT [<list of expressions>]`

## Purpose
Output information to the terminal for the operator.

## Remarks
`?` is shorthand for `PRINT`. A `PRINT` by itself outputs a newline.
Expressions separated by nothing or a semicolon print with nothing
between them. Output is divided into zones of 14 columns; a comma
advances to the start of the next zone. A trailing semicolon or comma
suppresses the newline so the next `PRINT` continues the same line.

Numbers print in their shortest form: `PRINT 5` outputs `5`. `TAB(n)`
inside a list pads to column n, starting a new line first when the
cursor is already past it.

## Example
```text
10 PRINT "HELLO, " ; "WORLD"
20 PRINT 1, 2
RUN
HELLO, WORLD
1             2
```

*/
